//! Runtime knobs for the pointer subsystem.

/// What happens to a secondary pointer once its contact ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SecondaryPointerPolicy {
    /// Drop the pointer from the registry after the terminating `up` (the one
    /// that releases its last button) or any `cancel` has been delivered.
    #[default]
    ExpireOnRelease,
    /// Keep every secondary pointer for the lifetime of the registry.
    Retain,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InputConfig {
    pub secondary_policy: SecondaryPointerPolicy,
    /// When set, the touch or pen contact the host flags as primary drives
    /// the primary pointer instead of getting its own secondary identity.
    pub primary_contact_drives_primary: bool,
}

impl InputConfig {
    pub fn with_secondary_policy(mut self, policy: SecondaryPointerPolicy) -> Self {
        self.secondary_policy = policy;
        self
    }

    pub fn with_primary_contact_drives_primary(mut self, enabled: bool) -> Self {
        self.primary_contact_drives_primary = enabled;
        self
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            secondary_policy: SecondaryPointerPolicy::default(),
            primary_contact_drives_primary: true,
        }
    }
}
