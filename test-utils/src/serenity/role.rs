//! Test factory for creating Serenity Role objects.

use serenity::all::Role;

/// Creates a test Serenity Role with customizable fields.
///
/// Creates a Role object by deserializing JSON with the provided values.
/// All other fields are set to reasonable defaults (not hoisted, not managed,
/// not mentionable, no color, position 1).
///
/// # Arguments
/// - `role_id` - Discord role ID (snowflake)
/// - `name` - Role name
/// - `permissions` - Role permission bitmask
///
/// # Returns
/// - `Role` - A valid Serenity Role struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Role (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::role::create_test_role;
///
/// let role = create_test_role(123456789, "Admin", 8);
/// assert_eq!(role.name, "Admin");
/// assert_eq!(role.permissions.bits(), 8);
/// ```
pub fn create_test_role(role_id: u64, name: &str, permissions: u64) -> Role {
    serde_json::from_value(serde_json::json!({
        "id": role_id.to_string(),
        "name": name,
        "color": 0,
        "colors": {
            "primary_color": 0,
            "secondary_color": null,
            "tertiary_color": null,
        },
        "hoist": false,
        "icon": null,
        "unicode_emoji": null,
        "position": 1,
        "permissions": permissions.to_string(),
        "managed": false,
        "mentionable": false,
    }))
    .expect("Failed to create test role - invalid JSON structure")
}
