use crate::server::enums::service_action::ServiceAction;

impl ServiceAction {
    pub fn verb(&self) -> &'static str {
        match self {
            ServiceAction::Install => "install",
            ServiceAction::Start => "start",
            ServiceAction::Stop => "stop",
            ServiceAction::Remove => "remove",
            ServiceAction::Restart => "restart",
        }
    }
}

impl std::fmt::Display for ServiceAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.verb())
    }
}
