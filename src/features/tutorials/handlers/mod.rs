pub mod tutorial_handler;

pub use tutorial_handler::{
    __path_create_tutorial, __path_delete_tutorial, __path_list_tutorials, create_tutorial,
    delete_tutorial, list_tutorials,
};
