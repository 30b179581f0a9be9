mod capture_id;
mod id_macro;

pub use capture_id::CaptureId;
