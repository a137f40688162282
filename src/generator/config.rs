/// Settings for the hand generator.
///
/// With the `serde` feature this can be read from any serde format,
/// missing fields fall back to their defaults.
///
/// ```
/// use hand_trainer::generator::GeneratorConfig;
///
/// let config: GeneratorConfig = serde_json::from_str(r#"{"max_attempts": 500000}"#).unwrap();
/// assert_eq!(500_000, config.max_attempts);
///
/// let config: GeneratorConfig = serde_json::from_str("{}").unwrap();
/// assert_eq!(GeneratorConfig::DEFAULT_MAX_ATTEMPTS, config.max_attempts);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GeneratorConfig {
    /// Most hands dealt while looking for a target category. A royal flush
    /// turns up about once every 30,000 to 50,000 hands, so this should
    /// stay well above that.
    pub max_attempts: usize,
}

impl GeneratorConfig {
    pub const DEFAULT_MAX_ATTEMPTS: usize = 200_000;
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
        }
    }
}
