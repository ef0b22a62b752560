use crate::KernelError;

/// Persistence port for a whole list of entities.
pub trait Storage<T> {
    fn load(&self) -> error_stack::Result<Vec<T>, KernelError>;
    fn save(&self, items: &[T]) -> error_stack::Result<(), KernelError>;
}

impl<T, S> Storage<T> for &S
where
    S: Storage<T> + ?Sized,
{
    fn load(&self) -> error_stack::Result<Vec<T>, KernelError> {
        (**self).load()
    }

    fn save(&self, items: &[T]) -> error_stack::Result<(), KernelError> {
        (**self).save(items)
    }
}
