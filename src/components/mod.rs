// UI Components
// Reusable pieces of the freelancer pages

pub mod icons;
pub mod chip_list;
pub mod profile_skeleton;
pub mod work_card;
pub mod review_card;

pub use chip_list::ChipList;
pub use profile_skeleton::ProfileSkeleton;
pub use work_card::WorkCardView;
pub use review_card::ReviewCardView;
