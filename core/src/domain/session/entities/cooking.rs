/// Position inside the selected recipe while cooking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookingStepper {
    recipe_index: usize,
    step_index: usize,
    step_count: usize,
    speaking: bool,
}

impl CookingStepper {
    pub fn new(recipe_index: usize, step_count: usize) -> Self {
        Self {
            recipe_index,
            step_index: 0,
            step_count: step_count.max(1),
            speaking: false,
        }
    }

    pub fn recipe_index(&self) -> usize {
        self.recipe_index
    }

    pub fn step_index(&self) -> usize {
        self.step_index
    }

    pub fn step_count(&self) -> usize {
        self.step_count
    }

    pub fn is_speaking(&self) -> bool {
        self.speaking
    }

    pub fn set_speaking(&mut self, speaking: bool) {
        self.speaking = speaking;
    }

    /// Returns whether the position changed; a no-op on the last step.
    pub fn next(&mut self) -> bool {
        if self.step_index + 1 >= self.step_count {
            return false;
        }
        self.step_index += 1;
        true
    }

    /// Returns whether the position changed; a no-op on the first step.
    pub fn previous(&mut self) -> bool {
        if self.step_index == 0 {
            return false;
        }
        self.step_index -= 1;
        true
    }
}
