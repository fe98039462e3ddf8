pub mod create_space;
pub mod dispatch;
pub mod publish;
pub mod schema;
pub mod scrape;
pub mod submit;
pub mod transform;
