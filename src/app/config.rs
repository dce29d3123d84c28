/// Centralized environment configuration.
/// All env vars and defaults are defined here.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server binds to.
    /// Default: 0.0.0.0:3000
    pub bind_addr: String,

    /// Advisory adapter: "offline" or "gemini".
    /// Default: offline
    pub advisory_adapter: String,

    /// Gemini API key. Required when advisory_adapter=gemini.
    pub gemini_api_key: Option<String>,

    /// Model used for compliance advice.
    /// Default: gemini-3-flash-preview
    pub advisory_model: String,

    /// Percentage points added to a course by one learning action (1..=100).
    /// Default: 10
    pub learning_step: u8,

    /// Load the demo organization, catalog and plans at startup.
    /// Default: true
    pub seed_demo_data: bool,
}

impl Config {
    /// Build config from environment variables.
    /// Returns an error if a var is present but invalid.
    pub fn from_env() -> Result<Self, String> {
        let bind_addr = std::env::var("BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        let advisory_adapter = std::env::var("ADVISORY_ADAPTER")
            .unwrap_or_else(|_| "offline".to_string());

        let gemini_api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|k| !k.is_empty());

        let advisory_model = std::env::var("ADVISORY_MODEL")
            .unwrap_or_else(|_| "gemini-3-flash-preview".to_string());

        let learning_step = std::env::var("LEARNING_STEP")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<u8>()
            .ok()
            .filter(|step| (1..=100).contains(step))
            .ok_or("LEARNING_STEP must be a number between 1 and 100")?;

        let seed_demo_data = match std::env::var("SEED_DEMO_DATA") {
            Ok(v) => v
                .parse::<bool>()
                .map_err(|_| "SEED_DEMO_DATA must be true or false")?,
            Err(_) => true,
        };

        Ok(Self {
            bind_addr,
            advisory_adapter,
            gemini_api_key,
            advisory_model,
            learning_step,
            seed_demo_data,
        })
    }

    /// Config for tests. Offline advisor, no demo data.
    pub fn for_tests() -> Self {
        Self {
            bind_addr: "127.0.0.1:0".to_string(),
            advisory_adapter: "offline".to_string(),
            gemini_api_key: None,
            advisory_model: "gemini-3-flash-preview".to_string(),
            learning_step: 10,
            seed_demo_data: false,
        }
    }
}
