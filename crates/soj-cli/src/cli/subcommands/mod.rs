pub mod auth;
pub mod profile;
pub mod push;
pub mod resource;

pub use auth::{AuthCommands, AuthLoginArgs, AuthPasswordArgs};
pub use profile::{ProfileCommands, ProfileEditArgs};
pub use push::{PushCommands, PushRegisterArgs, PushUnregisterArgs};
pub use resource::{ResourceCommands, ResourceListArgs};
