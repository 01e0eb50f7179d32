// Default value functions
pub fn default_strict_pointer_args() -> bool {
    true // row functions must pair every pointer with a length argument
}

pub fn default_allow_duplicate_overloads() -> bool {
    false
}

pub fn default_log_level() -> String {
    "info".to_string()
}

pub fn default_log_target() -> String {
    "extfn::registry".to_string()
}
