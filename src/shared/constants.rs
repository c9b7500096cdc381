// =============================================================================
// ERROR MESSAGES
// =============================================================================

pub const USER_NOT_FOUND: &str = "User not found";

pub const REGION_NOT_FOUND: &str = "Region not found";

/// Reported when a user request carries neither an address nor coordinates
pub const LOCATION_REQUIRED: &str = "\"address\" or \"coordinates\" is required";

// =============================================================================
// SUCCESS MESSAGES
// =============================================================================

pub const USER_CREATED: &str = "User created successfully";

pub const REGION_CREATED: &str = "Region created successfully";
