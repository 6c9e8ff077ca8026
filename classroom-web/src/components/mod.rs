pub(crate) mod announcement_form;
pub(crate) mod announcement_list;
pub(crate) mod due_list;
pub(crate) mod image_upload;
pub(crate) mod loading;
pub(crate) mod nav_item;
pub(crate) mod quiz_form;
pub(crate) mod text_field;
pub(crate) mod user_menu;
