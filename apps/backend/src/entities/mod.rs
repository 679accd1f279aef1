pub mod salaries;
pub mod users;
pub mod works;

pub use salaries::Entity as Salaries;
pub use salaries::Model as Salary;
pub use users::Entity as Users;
pub use users::Model as User;
pub use users::Role;
pub use works::Entity as Works;
pub use works::Model as Work;
