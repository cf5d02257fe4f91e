//! Граница с клиентом (терминал):
//! - команды (commands.rs) — разбор ответа игрока;
//! - DTO (dto.rs) — раунд для JSON-вывода, с ответом или без;
//! - format (format.rs) — цветной текст для терминала;
//! - ошибки (errors.rs) — то, что видит игрок.

pub mod commands;
pub mod dto;
pub mod errors;
pub mod format;

pub use commands::*;
pub use dto::*;
pub use errors::*;
pub use format::*;
