
#[cfg(debug_assertions)]
pub fn get_completion_url() -> &'static str {
    "http://localhost:8787"  // wrangler dev when running the worker locally
}

#[cfg(not(debug_assertions))]
pub fn get_completion_url() -> &'static str {
    "https://chill-worker.mikkaeldumancas.workers.dev/"  // Production worker
}

pub const SYSTEM_INSTRUCTION: &str = "You are a helpful assistant.";

pub const REQUEST_TIMEOUT_MS: u32 = 30_000;
pub const NOTICE_LIFETIME_MS: u32 = 6_000;
