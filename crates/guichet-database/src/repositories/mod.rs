//! Repository implementations over the PostgreSQL pool.

pub mod group;
pub mod ticket;
pub mod user;

pub use group::GroupRepository;
pub use ticket::TicketRepository;
pub use user::UserRepository;
