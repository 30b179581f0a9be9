mod resolve_intro;

pub use resolve_intro::ResolveIntroGuidance;
