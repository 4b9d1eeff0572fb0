pub(crate) mod authenticated_user;
pub(crate) mod todo_id;

use crate::error::Error;

type RejectionType = Error;
