pub mod toast_registry;

pub use toast_registry::ToastRegistry;
