// Instance storage accessors. Callers must have `paste`, `bump_instance`,
// `panic_with_error` and `StorageError` in scope.

#[macro_export]
macro_rules! generate_instance_storage_setter {
    ($attr_name:ident, $key:expr, $data_type:ty) => {
        paste! {
            pub(crate) fn [<set_ $attr_name>](e: &Env, $attr_name: &$data_type) {
                bump_instance(e);
                e.storage().instance().set(&$key, $attr_name)
            }
        }
    };
}

#[macro_export]
macro_rules! generate_instance_storage_getter {
    ($attr_name:ident, $key:expr, $data_type:ty) => {
        paste! {
            pub(crate) fn [<get_ $attr_name>](e: &Env) -> $data_type {
                bump_instance(e);
                match e.storage().instance().get(&$key) {
                    Some(value) => value,
                    None => panic_with_error!(e, StorageError::ValueNotInitialized),
                }
            }
        }
    };
}

#[macro_export]
macro_rules! generate_instance_storage_getter_and_setter {
    ($attr_name:ident, $key:expr, $data_type:ty) => {
        generate_instance_storage_getter!($attr_name, $key, $data_type);
        generate_instance_storage_setter!($attr_name, $key, $data_type);
    };
}
