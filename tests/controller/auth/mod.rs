mod callback;
mod login;
mod logout;
mod user;

use super::*;
