mod button;
mod modal;
mod spinner;
mod toast;

pub use button::Button;
pub use modal::Modal;
pub use spinner::Spinner;
pub use toast::{provide_toasts, use_toasts, ToastContainer, Toasts};
