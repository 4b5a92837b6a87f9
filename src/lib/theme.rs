//! Shared Tailwind class constants so the sign-in form and the reset modal
//! stay visually consistent.

pub struct Theme;

impl Theme {
    /// Standard text input used by every form field.
    pub const INPUT: &'static str = "w-full rounded-xl border border-slate-200 bg-slate-50 px-3 py-2.5 text-sm text-slate-900 focus:border-slate-400 focus:ring-2 focus:ring-slate-200 dark:border-gray-600 dark:bg-gray-700 dark:text-white";

    /// Field label above an input.
    pub const LABEL: &'static str = "block mb-2 text-sm font-medium text-slate-700 dark:text-gray-200";

    /// Inline validation message under an input.
    pub const FIELD_ERROR: &'static str = "mt-1 text-sm text-red-600 dark:text-red-400";

    /// Underlined inline action, used for the register and forgot-password
    /// links.
    pub const LINK: &'static str = "text-sm font-medium text-slate-600 underline decoration-slate-300 underline-offset-4 transition hover:text-slate-900 cursor-pointer dark:text-gray-300 dark:hover:text-white";
}
