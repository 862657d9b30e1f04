// ControllerId

/// Key identifying a controller (player or bot) within the session
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct ControllerId(u64);

impl ControllerId {
    pub fn new(value: u64) -> Self {
        ControllerId(value)
    }

    pub fn to_u64(&self) -> u64 {
        self.0
    }
}
