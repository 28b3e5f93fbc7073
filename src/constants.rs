pub mod search {
    use std::time::Duration;

    pub const DEFAULT_HISTORY_LIMIT: usize = 5;

    pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);
}

pub mod categories {

    pub const PATIENTS: &str = "patients";

    pub const MEDICATIONS: &str = "medications";

    pub const RESOURCES: &str = "resources";

    pub const STAFF: &str = "staff";
}

pub mod server {

    pub const DEFAULT_PORT: u16 = 6790;
}
