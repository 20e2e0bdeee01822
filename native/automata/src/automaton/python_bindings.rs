//! PyO3 bindings for the automaton module.

use crate::automaton::finite_automaton::Automaton;
use crate::automaton::loader;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PySet;

/// A finite automaton whose states are identified by name.
#[pyclass(name = "Automaton", module = "automata.automaton")]
#[derive(Clone, Default)]
pub struct PyAutomaton {
    /// The underlying Rust automaton
    inner: Automaton,
}

#[pymethods]
impl PyAutomaton {
    #[new]
    fn new() -> Self {
        Self::default()
    }

    /// Parse an automaton from its textual description.
    #[staticmethod]
    fn parse(text: &str) -> PyResult<Self> {
        let inner = loader::parse(text).map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self { inner })
    }

    /// Add a state. Returns its integer id.
    #[pyo3(signature = (name, is_initial = false, is_final = false))]
    fn add_state(&mut self, name: &str, is_initial: bool, is_final: bool) -> PyResult<u32> {
        self.inner
            .add_state(name, is_initial, is_final)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// Add a transition on a single-character symbol.
    fn add_transition(&mut self, origin: &str, symbol: char, destination: &str) -> PyResult<()> {
        self.inner
            .add_transition(origin, symbol, destination)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// Add an epsilon transition.
    fn add_epsilon_transition(&mut self, origin: &str, destination: &str) -> PyResult<()> {
        self.inner
            .add_epsilon_transition(origin, destination)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    fn is_deterministic(&self) -> bool {
        self.inner.is_deterministic()
    }

    fn accepts(&self, word: &str) -> bool {
        self.inner.accepts(word)
    }

    /// Check if the automaton's language is empty.
    fn is_empty(&self) -> bool {
        self.inner.language_is_empty()
    }

    /// Return an equivalent deterministic automaton.
    /// An already deterministic automaton is returned as a copy.
    fn to_deterministic(&self) -> Self {
        Self {
            inner: self.inner.to_deterministic().into_owned(),
        }
    }

    /// Get the state names, in insertion order.
    #[getter]
    fn states(&self) -> Vec<String> {
        self.inner
            .states()
            .iter()
            .map(|state| state.name().to_owned())
            .collect()
    }

    #[getter]
    fn alphabet(&self, py: Python<'_>) -> PyResult<Py<PySet>> {
        let set = PySet::empty(py)?;
        for symbol in self.inner.alphabet() {
            set.add(symbol.to_string())?;
        }
        Ok(set.unbind())
    }

    #[getter]
    fn initial_state(&self) -> Option<String> {
        self.inner
            .initial_state()
            .and_then(|id| self.inner.state(id))
            .map(|state| state.name().to_owned())
    }

    /// Get the final state names as a set.
    #[getter]
    fn final_states(&self, py: Python<'_>) -> PyResult<Py<PySet>> {
        let set = PySet::empty(py)?;
        for id in self.inner.final_states().iter() {
            if let Some(state) = self.inner.state(id) {
                set.add(state.name())?;
            }
        }
        Ok(set.unbind())
    }

    fn __str__(&self) -> String {
        self.inner.to_string()
    }

    fn __repr__(&self) -> String {
        format!(
            "Automaton(states={}, transitions={})",
            self.inner.num_states(),
            self.inner.num_transitions()
        )
    }
}

/// Register the automaton submodule.
pub fn automaton(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyAutomaton>()?;
    Ok(())
}
