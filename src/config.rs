use dotenvy::dotenv;
use std::env;

#[derive(Clone)]
pub struct Config {
    pub server_addr: String,

    // Rate limiting
    pub rate_mutation_per_min: u32,
    pub rate_query_per_min: u32,

    pub api_prefix: String,
    pub seed_demo_data: bool,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        Self {
            server_addr: env::var("SERVER_ADDR").unwrap_or_else(|_| "127.0.0.1:8000".to_string()),

            rate_mutation_per_min: env::var("RATE_MUTATION_PER_MIN")
                .unwrap_or_else(|_| "120".to_string())
                .parse()
                .unwrap(),
            rate_query_per_min: env::var("RATE_QUERY_PER_MIN")
                .unwrap_or_else(|_| "600".to_string())
                .parse()
                .unwrap(),

            api_prefix: env::var("API_PREFIX").unwrap_or_else(|_| "".to_string()),
            seed_demo_data: env::var("SEED_DEMO_DATA")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        }
    }
}
