pub use super::guild::Entity as Guild;
pub use super::role::Entity as Role;
