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

    pub fn transfer_ownership(&self, previous_owner: Address, new_owner: Address) {
        self.env().events().publish(
            (Symbol::new(self.env(), "ownership_transferred"),),
            (previous_owner, new_owner),
        )
    }
}
