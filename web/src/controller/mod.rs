pub(crate) mod attachment_controller;
pub(crate) mod health_check_controller;
pub(crate) mod todo_controller;
