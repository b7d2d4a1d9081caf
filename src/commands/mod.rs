pub mod add;
pub mod download;
pub mod events;
pub mod ics;
pub mod probe;
pub mod subscribe;
pub mod urls;
