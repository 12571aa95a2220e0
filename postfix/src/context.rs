use std::collections::HashMap;

// Variable bindings visible to conversion and evaluation. The core only
// reads them; writes happen through setvar from whatever drives the core.
pub struct MathContext {
    vars: HashMap<String, f64>,
}

impl MathContext {
    pub fn new() -> MathContext {
        MathContext {
            vars: HashMap::new(),
        }
    }

    pub fn setvar(&mut self, var: &str, val: f64) {
        self.vars.insert(var.to_string(), val);
    }

    pub fn getvar(&self, var: &str) -> Option<f64> {
        self.vars.get(var).copied()
    }
}

impl Default for MathContext {
    fn default() -> Self {
        Self::new()
    }
}
