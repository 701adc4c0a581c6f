//! One module per page: the gallery index plus the nine templates.

mod home;
pub use home::Home;

mod architecture;
pub use architecture::Architecture;

mod agency;
pub use agency::Agency;

mod saas;
pub use saas::Saas;

mod restaurant;
pub use restaurant::Restaurant;

mod jewelry;
pub use jewelry::Jewelry;

mod photography;
pub use photography::Photography;

mod magazine;
pub use magazine::Magazine;

mod interior;
pub use interior::Interior;

mod roastery;
pub use roastery::Roastery;
