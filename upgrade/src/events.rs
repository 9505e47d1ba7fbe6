use soroban_sdk::{Address, Env, Symbol};

#[derive(Clone)]
pub struct Events(Env);

impl Events {
    #[inline(always)]
    pub fn env(&self) -> &Env {
        &self.0
    }

    #[inline(always)]
    pub fn new(env: &Env) -> Events {
        Events(env.clone())
    }

    pub fn upgrade(&self, new_implementation: Address) {
        self.env().events().publish(
            (Symbol::new(self.env(), "upgraded"),),
            (new_implementation,),
        )
    }
}
