pub mod button_bar;
pub mod entry_input;
pub mod entry_list;
pub mod entry_row;
pub mod favorites_form;
pub mod help_bar;
pub mod modal;
pub mod review_dialog;

pub use tui_dispatch::Component;

pub use button_bar::{ButtonBar, ButtonBarProps};
pub use entry_input::{EntryInput, EntryInputProps};
pub use entry_list::{EntryListProps, EntryListView};
pub use entry_row::{EntryRow, EntryRowProps, RowDrag, RowLayout};
pub use favorites_form::{FavoritesForm, FavoritesFormProps};
pub use help_bar::{HelpBar, HelpBarProps, HelpMode};
pub use review_dialog::{ReviewDialog, ReviewDialogProps};
