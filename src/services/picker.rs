use rand::Rng;

/// Chooses which reply template to use out of `len` candidates.
pub trait TemplatePicker: Send + Sync {
    fn pick(&self, len: usize) -> usize;
}

/// Uniform choice from the calling thread's RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomPicker;

impl TemplatePicker for RandomPicker {
    fn pick(&self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        rand::thread_rng().gen_range(0..len)
    }
}

/// Always the first template.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstPicker;

impl TemplatePicker for FirstPicker {
    fn pick(&self, _len: usize) -> usize {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_picker_stays_in_range() {
        let picker = RandomPicker;
        for _ in 0..200 {
            assert!(picker.pick(3) < 3);
        }
        assert_eq!(picker.pick(0), 0);
    }

    #[test]
    fn first_picker_is_fixed() {
        assert_eq!(FirstPicker.pick(5), 0);
    }
}
