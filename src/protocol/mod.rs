//! Protocol Module
//!
//! Defines the text command language spoken between a driver (the
//! interactive shell, a script, a test) and the [`Engine`](crate::Engine).
//!
//! ## Request Format
//! One command per line: a keyword or menu letter, then an optional
//! argument.
//! ```text
//! insert 4.5        2 4.5
//! delete 3          3 3
//! kind population   1 P
//! stat median       G
//! report            Y
//! save out.txt      Z out.txt
//! ```
//!
//! ## Response Format
//! Each [`Response`] renders as one or more console lines, e.g. `Mean = 4.75` or `Mode(s): (none)`. Failures render as
//! `Exception Error: <message>`.

mod codec;
mod command;
mod response;

pub use codec::{decode_command, decode_value, encode_command};
pub use command::{Command, StatKind};
pub use response::{format_address, render_error, Response, StatValue};
