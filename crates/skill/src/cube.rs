//! Hindcast cubes and their verification-time grids.

use ndarray::Array2;
use skillcast_calendar::{NoLeapDate, NoLeapDateTime, month_sequence, to_midmonth};
use skillcast_labeled::{CoordValues, LabeledArray};

use crate::axes::{LEAD, MEMBER, START_YEAR};
use crate::error::SkillError;

/// A hindcast ensemble with axes `(Y, L, M, ...)`.
///
/// `Y` and `L` carry integer coordinates; any axes after `M` (grid points,
/// regions) are passed through every computation untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct HindcastCube {
    array: LabeledArray,
    start_years: Vec<i64>,
    leads: Vec<i64>,
}

impl HindcastCube {
    /// Validates `array` and reorders it to `(Y, L, M, ...)`.
    ///
    /// # Errors
    ///
    /// - [`SkillError::MissingAxis`] if `Y`, `L` or `M` is absent.
    /// - [`SkillError::NonIntegerAxis`] if `Y` or `L` is not integer-labelled.
    /// - [`SkillError::EmptyAxis`] if there are no members.
    pub fn new(array: LabeledArray) -> Result<Self, SkillError> {
        for axis in [START_YEAR, LEAD, MEMBER] {
            if !array.has_axis(axis) {
                return Err(SkillError::MissingAxis {
                    axis: axis.to_string(),
                });
            }
        }
        let int_coords = |axis: &str| -> Result<Vec<i64>, SkillError> {
            array
                .coord(axis)?
                .as_ints()
                .map(<[i64]>::to_vec)
                .ok_or_else(|| SkillError::NonIntegerAxis {
                    axis: axis.to_string(),
                })
        };
        let start_years = int_coords(START_YEAR)?;
        let leads = int_coords(LEAD)?;
        if array.len_of(MEMBER)? == 0 {
            return Err(SkillError::EmptyAxis {
                axis: MEMBER.to_string(),
            });
        }

        let mut order = vec![START_YEAR, LEAD, MEMBER];
        order.extend(
            array
                .dims()
                .into_iter()
                .filter(|d| ![START_YEAR, LEAD, MEMBER].contains(d)),
        );
        let array = array.transpose(&order)?;
        Ok(Self {
            array,
            start_years,
            leads,
        })
    }

    pub fn array(&self) -> &LabeledArray {
        &self.array
    }

    pub fn into_array(self) -> LabeledArray {
        self.array
    }

    /// Start-year coordinates.
    pub fn start_years(&self) -> &[i64] {
        &self.start_years
    }

    /// Raw lead coordinates.
    pub fn leads(&self) -> &[i64] {
        &self.leads
    }

    /// Member coordinates.
    pub fn members(&self) -> &CoordValues {
        self.array
            .coord(MEMBER)
            .expect("member axis checked at construction")
    }

    pub fn member_count(&self) -> usize {
        self.array.shape()[2]
    }

    /// A cube holding the members at `indices` (repeats allowed), relabelled
    /// `1..=indices.len()`.
    pub fn select_members(&self, indices: &[usize]) -> Result<Self, SkillError> {
        let array = self
            .array
            .isel(MEMBER, indices)?
            .assign_coord(MEMBER, CoordValues::range(1, indices.len()))?;
        Ok(Self {
            array,
            start_years: self.start_years.clone(),
            leads: self.leads.clone(),
        })
    }
}

/// Calendar date each `(Y, L)` cell of a hindcast cube verifies at.
///
/// Rows pair with the cube's start years and columns with its leads by
/// position.
#[derive(Debug, Clone, PartialEq)]
pub struct VerificationTimeCube {
    start_years: Vec<i64>,
    leads: Vec<i64>,
    times: Array2<NoLeapDate>,
}

impl VerificationTimeCube {
    /// Wraps a `(Y, L)` grid of dates.
    ///
    /// # Errors
    ///
    /// [`SkillError::LengthMismatch`] if the grid shape disagrees with the
    /// coordinate lengths.
    pub fn new(
        start_years: Vec<i64>,
        leads: Vec<i64>,
        times: Array2<NoLeapDate>,
    ) -> Result<Self, SkillError> {
        let (rows, cols) = times.dim();
        if rows != start_years.len() {
            return Err(SkillError::LengthMismatch {
                field: START_YEAR.to_string(),
                expected: start_years.len(),
                got: rows,
            });
        }
        if cols != leads.len() {
            return Err(SkillError::LengthMismatch {
                field: LEAD.to_string(),
                expected: leads.len(),
                got: cols,
            });
        }
        Ok(Self {
            start_years,
            leads,
            times,
        })
    }

    /// Builds the grid from `f(start_year, lead)`.
    pub fn from_fn<F>(start_years: Vec<i64>, leads: Vec<i64>, mut f: F) -> Self
    where
        F: FnMut(i64, i64) -> NoLeapDate,
    {
        let times = Array2::from_shape_fn((start_years.len(), leads.len()), |(y, l)| {
            f(start_years[y], leads[l])
        });
        Self {
            start_years,
            leads,
            times,
        }
    }

    /// Mid-month verification times of monthly hindcasts initialised in
    /// `init_month` of each start year, with leads `1..=nleads`.
    ///
    /// Lead 1 verifies in the initialisation month itself. The stamps are
    /// produced the way monthly model output is stored (at the first day of
    /// the following month) and then re-stamped to mid-month.
    pub fn monthly(
        start_years: Vec<i64>,
        init_month: u8,
        nleads: usize,
    ) -> Result<Self, SkillError> {
        let mut dates = Vec::with_capacity(start_years.len() * nleads);
        for &year in &start_years {
            let stored = NoLeapDate::new(year as i32, init_month, 1)?.next_month();
            dates.extend(to_midmonth(&month_sequence(stored, nleads)));
        }
        let times = Array2::from_shape_fn((start_years.len(), nleads), |(row, col)| {
            dates[row * nleads + col]
        });
        Ok(Self {
            start_years,
            leads: (1..=nleads as i64).collect(),
            times,
        })
    }

    pub fn start_years(&self) -> &[i64] {
        &self.start_years
    }

    pub fn leads(&self) -> &[i64] {
        &self.leads
    }

    pub fn times(&self) -> &Array2<NoLeapDate> {
        &self.times
    }

    /// Calendar years at lead position `lead`.
    pub fn years_at_lead(&self, lead: usize) -> Vec<i64> {
        self.times
            .column(lead)
            .iter()
            .map(|d| d.year() as i64)
            .collect()
    }

    /// The calendar month shared by every start year at lead position `lead`.
    ///
    /// # Errors
    ///
    /// - [`SkillError::EmptyAxis`] if there are no start years.
    /// - [`SkillError::MixedLeadMonths`] if start years disagree.
    pub fn lead_month(&self, lead: usize) -> Result<u8, SkillError> {
        let column = self.times.column(lead);
        let first = column
            .first()
            .map(|d| d.month())
            .ok_or_else(|| SkillError::EmptyAxis {
                axis: START_YEAR.to_string(),
            })?;
        match column.iter().find(|d| d.month() != first) {
            Some(d) => Err(SkillError::MixedLeadMonths {
                lead,
                first,
                other: d.month(),
            }),
            None => Ok(first),
        }
    }

    /// Representative year of a block of lead positions, per start year: the
    /// mean verification year rounded up.
    pub fn block_years(&self, leads: &[usize]) -> Vec<i64> {
        let k = leads.len().max(1) as f64;
        self.times
            .rows()
            .into_iter()
            .map(|row| {
                let sum: i64 = leads.iter().map(|&l| row[l].year() as i64).sum();
                (sum as f64 / k).ceil() as i64
            })
            .collect()
    }

    /// `true` where the verification time lies strictly between `start` and
    /// `end`.
    pub fn mask_between(&self, start: NoLeapDateTime, end: NoLeapDateTime) -> Array2<bool> {
        self.times.mapv(|d| {
            let t = d.at_midnight();
            t > start && t < end
        })
    }

    /// Checks that this grid matches `cube` in start-year and lead count.
    pub fn check_matches(&self, cube: &HindcastCube) -> Result<(), SkillError> {
        if self.start_years.len() != cube.start_years().len() {
            return Err(SkillError::LengthMismatch {
                field: START_YEAR.to_string(),
                expected: cube.start_years().len(),
                got: self.start_years.len(),
            });
        }
        if self.leads.len() != cube.leads().len() {
            return Err(SkillError::LengthMismatch {
                field: LEAD.to_string(),
                expected: cube.leads().len(),
                got: self.leads.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillcast_labeled::Coordinate;

    fn cube_array() -> LabeledArray {
        // (M=2, x=1, Y=2, L=3) in a scrambled order
        LabeledArray::from_vec(
            vec![
                Coordinate::new("M", CoordValues::range(1, 2)),
                Coordinate::new("x", CoordValues::range(0, 1)),
                Coordinate::new("Y", vec![1990_i64, 1991]),
                Coordinate::new("L", CoordValues::range(1, 3)),
            ],
            (0..12).map(f64::from).collect(),
        )
        .unwrap()
    }

    #[test]
    fn new_reorders_axes() {
        let cube = HindcastCube::new(cube_array()).unwrap();
        assert_eq!(cube.array().dims(), vec!["Y", "L", "M", "x"]);
        assert_eq!(cube.start_years(), &[1990, 1991]);
        assert_eq!(cube.leads(), &[1, 2, 3]);
        assert_eq!(cube.member_count(), 2);
    }

    #[test]
    fn new_requires_member_axis() {
        let no_m = cube_array().sel("M", 1).unwrap();
        assert_eq!(
            HindcastCube::new(no_m).unwrap_err(),
            SkillError::MissingAxis { axis: "M".into() }
        );
    }

    #[test]
    fn new_requires_integer_years() {
        let float_years = cube_array().assign_coord("Y", vec![1990.0, 1991.0]).unwrap();
        assert_eq!(
            HindcastCube::new(float_years).unwrap_err(),
            SkillError::NonIntegerAxis { axis: "Y".into() }
        );
    }

    #[test]
    fn select_members_relabels() {
        let cube = HindcastCube::new(cube_array()).unwrap();
        let sub = cube.select_members(&[1, 1, 0]).unwrap();
        assert_eq!(sub.member_count(), 3);
        assert_eq!(sub.array().coord("M").unwrap(), &CoordValues::Int(vec![1, 2, 3]));
        let first = sub.array().sel("M", 1).unwrap();
        let original = cube.array().sel("M", 2).unwrap();
        assert_eq!(first, original);
    }

    #[test]
    fn monthly_times_start_in_init_month() {
        let times = VerificationTimeCube::monthly(vec![1990, 1991], 11, 4).unwrap();
        assert_eq!(times.times()[(0, 0)], NoLeapDate::new(1990, 11, 15).unwrap());
        assert_eq!(times.times()[(0, 2)], NoLeapDate::new(1991, 1, 15).unwrap());
        assert_eq!(times.years_at_lead(3), vec![1991, 1992]);
        assert_eq!(times.lead_month(1).unwrap(), 12);
        assert_eq!(times.leads(), &[1, 2, 3, 4]);
    }

    #[test]
    fn monthly_rejects_bad_month() {
        assert!(matches!(
            VerificationTimeCube::monthly(vec![1990], 13, 2),
            Err(SkillError::Calendar(_))
        ));
    }

    #[test]
    fn new_checks_shape() {
        let grid = Array2::from_elem((2, 2), NoLeapDate::new(2000, 1, 15).unwrap());
        assert!(matches!(
            VerificationTimeCube::new(vec![1990, 1991], vec![1, 2, 3], grid),
            Err(SkillError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn lead_month_detects_mixture() {
        let times = VerificationTimeCube::from_fn(vec![1990, 1991], vec![1], |y, _| {
            let month = if y == 1990 { 1 } else { 2 };
            NoLeapDate::new(y as i32, month, 15).unwrap()
        });
        assert_eq!(
            times.lead_month(0).unwrap_err(),
            SkillError::MixedLeadMonths {
                lead: 0,
                first: 1,
                other: 2,
            }
        );
    }

    #[test]
    fn block_years_round_up() {
        // annual leads: lead l verifies in year y + l
        let times = VerificationTimeCube::from_fn(vec![1990], vec![1, 2, 3, 4], |y, l| {
            NoLeapDate::new((y + l) as i32, 7, 1).unwrap()
        });
        assert_eq!(times.block_years(&[0, 1, 2]), vec![1992]);
        assert_eq!(times.block_years(&[0, 1]), vec![1992]);
        assert_eq!(times.block_years(&[3]), vec![1994]);
    }

    #[test]
    fn mask_between_is_strict() {
        let times = VerificationTimeCube::from_fn(vec![1990], vec![1, 2], |_, l| {
            if l == 1 {
                NoLeapDate::new(1985, 1, 1).unwrap()
            } else {
                NoLeapDate::new(1985, 1, 2).unwrap()
            }
        });
        let mask = times.mask_between(
            NoLeapDateTime::start_of_year(1985),
            NoLeapDateTime::end_of_year(1985),
        );
        assert!(!mask[(0, 0)]);
        assert!(mask[(0, 1)]);
    }
}
