pub mod audio;
pub mod billing;
pub mod bots;
pub mod chat;
pub mod images;
pub mod opinions;
pub mod settings;
pub mod shared;

pub use audio::AudioView;
pub use billing::BillingView;
pub use bots::BotsView;
pub use chat::ChatView;
pub use images::ImagesView;
pub use opinions::OpinionsView;
pub use settings::SettingsView;
