//! Finite automata over character alphabets.
//!
//! Build an [`Automaton`] state by state, then ask whether it
//! [accepts](Automaton::accepts) a word or turn it into an equivalent DFA
//! with [`Automaton::to_deterministic`].
//!
//! ```
//! use automata::Automaton;
//!
//! let mut nfa = Automaton::new();
//! nfa.add_state("s0", true, false)?;
//! nfa.add_state("s1", false, false)?;
//! nfa.add_state("s2", false, true)?;
//! nfa.add_transition("s0", 'a', "s1")?;
//! nfa.add_transition("s0", 'a', "s2")?;
//!
//! assert!(!nfa.is_deterministic());
//! let dfa = nfa.to_deterministic();
//! assert!(dfa.is_deterministic());
//! assert!(dfa.accepts("a"));
//! # Ok::<(), automata::AutomatonError>(())
//! ```

pub mod automaton;

pub use automaton::{
    Automaton, AutomatonError, Determinized, EPSILON, Rejection, State, StateId, StateSet, Symbol,
    Transition, Verdict, subset_construction,
};

#[cfg(feature = "python")]
mod python {
    use pyo3::prelude::*;

    fn import_submodule<'py>(
        py: Python<'py>,
        m: &Bound<'py, PyModule>,
        package: &str,
        name: &str,
        import_func: impl FnOnce(&Bound<'py, PyModule>) -> PyResult<()>,
    ) -> PyResult<()> {
        let submodule = PyModule::new(py, name)?;
        import_func(&submodule)?;

        // Add the submodule to sys.modules
        let sys_modules = PyModule::import(py, "sys")?.getattr("modules")?;
        sys_modules.set_item(format!("{}.{}", package, name), submodule.clone())?;

        m.add_submodule(&submodule)?;
        Ok(())
    }

    #[pymodule]
    fn automata(m: &Bound<'_, PyModule>) -> PyResult<()> {
        import_submodule(m.py(), m, "automata", "automaton", crate::automaton::automaton)
    }
}
