/// Wizard position reduced to the pair the progress presenter consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WizardProgress {
    pub current_step: usize,
    pub total_steps: usize,
}
