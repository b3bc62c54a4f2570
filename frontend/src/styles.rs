pub const CONTAINER: &str = "min-h-screen bg-gray-50 dark:bg-gray-900 w-full px-4 sm:px-6 lg:px-8";
pub const CONTAINER_SM: &str = "max-w-md mx-auto px-4 sm:px-6 py-12";
pub const CARD: &str = "bg-white dark:bg-gray-800 rounded-lg shadow-lg dark:shadow-[0_4px_12px_-4px_rgba(255,255,255,0.03)] p-6";
pub const CARD_TITLE: &str = "text-lg font-semibold text-gray-900 dark:text-white";
pub const CARD_TEXT: &str = "text-sm text-gray-600 dark:text-gray-400";
pub const BUTTON_PRIMARY: &str = "inline-flex items-center justify-center px-4 py-2 rounded-lg font-medium text-white bg-gradient-to-r from-orange-500 to-orange-600 hover:from-orange-600 hover:to-orange-700 shadow-lg hover:shadow-xl transition-all duration-300";
pub const TEXT_H2: &str = "text-2xl font-bold text-gray-900 dark:text-white";
pub const TEXT_SMALL: &str = "text-sm text-gray-500 dark:text-gray-400";
pub const ALERT_ERROR: &str = "bg-red-50 dark:bg-red-900/50 border border-red-200 dark:border-red-800 rounded-lg p-3 text-sm text-red-700 dark:text-red-200";

// Modal
pub const MODAL_BACKDROP: &str = "fixed inset-0 z-[1100] bg-black/70 backdrop-blur-sm overflow-y-auto flex items-center justify-center p-4";
pub const MODAL_PANEL: &str = "relative w-full max-w-md bg-white dark:bg-gray-800 rounded-2xl shadow-2xl border border-orange-200/50 dark:border-gray-700/50 p-6 flex flex-col items-center gap-4";
pub const MODAL_CLOSE: &str = "absolute top-3 right-3 p-2 text-gray-500 hover:text-gray-900 dark:text-gray-400 dark:hover:text-white rounded-full transition-colors duration-200";
pub const CONFETTI_LAYER: &str = "fixed inset-0 pointer-events-none overflow-hidden z-[1200]";
