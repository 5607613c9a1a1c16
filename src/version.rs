// Version information for the Derma Node demo service

/// Full version string
pub const VERSION: &str = "v0.1.0-skin-lesion-demo-2026-08-30";

/// Semantic version number
pub const VERSION_NUMBER: &str = "0.1.0";

/// Build date
pub const BUILD_DATE: &str = "2026-08-30";

/// Model repository this build defaults to
pub const DEFAULT_MODEL_REPO: &str = "Anwarkh1/Skin_Cancer-Image_Classification";
