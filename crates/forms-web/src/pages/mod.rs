//! Page Components

mod contact;
mod create_agent;
mod demo;
mod home;
mod try_demo;

pub use contact::ContactPage;
pub use create_agent::CreateAgentPage;
pub use demo::DemoPage;
pub use home::HomePage;
pub use try_demo::TryDemoPage;
