pub use super::bootcamp::Entity as Bootcamp;
