pub mod posts;
pub mod rate_limit;
pub mod token;

pub use posts::PostStore;
pub use rate_limit::RateLimiter;
pub use token::TokenIssuer;
