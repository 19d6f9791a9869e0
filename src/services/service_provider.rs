/// Hands out one of the services a backend is composed of.
pub trait ServiceProvider<T>: Send + Sync
where
    T: Send + Sync + 'static,
{
    fn get(&self) -> T;
}
