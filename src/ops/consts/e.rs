//! Euler number.

use crate::field::Field;
use crate::num::Dfp;
use crate::ops::series::series_run;
use crate::ops::series::ExpCoeff;

/// Computes e as the sum of `1/k!`.
pub(super) fn compute_e(wf: &Field) -> Dfp {
    let one = wf.one();
    series_run(one.clone(), one.clone(), &one, &mut ExpCoeff::new(one.clone()))
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_e() {
        let wf = Field::new(60).unwrap();
        let g = Field::new(48).unwrap();
        let e = compute_e(&wf).new_instance(&g, None);
        assert_eq!(e.to_string(), "2.71828182845904523536028747135266249775724709");
    }
}
