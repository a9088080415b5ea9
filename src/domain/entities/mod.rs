//! Core domain entities representing the PawConnect data model.
//!
//! Entities are plain data structures loaded from the seed document. None of
//! them is created or destroyed at runtime.
//!
//! # Entity Types
//!
//! - [`Shelter`] - A shelter, the primary browsable entity
//! - [`Animal`] - An animal housed by a shelter
//! - [`VolunteerSlot`] - A volunteer time window at a shelter
//! - [`Application`] - A volunteer's request for a slot
//! - [`Post`] - A shelter news item
//! - [`RegionMap`] - Province → district hierarchy
//! - [`Account`] - A user that can sign in

pub mod account;
pub mod animal;
pub mod application;
pub mod post;
pub mod region;
pub mod shelter;
pub mod volunteer_slot;

pub use account::{Account, Profile, Role};
pub use animal::{Animal, AnimalStatus, Sex, ShelterLink, Species};
pub use application::{Application, ApplicationStatus};
pub use post::{Post, PostType};
pub use region::{Region, RegionMap};
pub use shelter::{MAX_DISPLAYED_TAGS, Shelter};
pub use volunteer_slot::{SlotType, VolunteerSlot};
