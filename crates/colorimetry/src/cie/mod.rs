mod illuminants;
mod photopic;
mod planck;
mod two_deg;
mod whitepoints;

pub use illuminants::{illuminant, illuminant_a, CIE_ILLUMINANT_D65, CIE_ILLUMINANT_F2, ILLUMINANTS};
pub use photopic::CIE_1924_PHOTOPIC_LEF;
pub use planck::{blackbody_spd, planck_law, PLANCK_C1, PLANCK_C2};
pub use two_deg::CIE_1931_2DEG_OBSERVER;
pub use whitepoints::{
    whitepoint, WHITEPOINT_A, WHITEPOINT_D50, WHITEPOINT_D65, WHITEPOINT_E, WHITEPOINT_F2,
};

#[cfg(test)]
mod test {
    use super::{
        blackbody_spd, illuminant, illuminant_a, whitepoint, CIE_1924_PHOTOPIC_LEF,
        CIE_1931_2DEG_OBSERVER, CIE_ILLUMINANT_D65, CIE_ILLUMINANT_F2, WHITEPOINT_A,
        WHITEPOINT_D65, WHITEPOINT_F2,
    };
    use crate::core::{Sum, ThreeSum};
    use crate::shape::SpectralShape;
    use crate::tristimulus::spectral_to_xyz;
    use crate::{Float, SpectralDistribution};

    #[test]
    fn test_checksum() {
        for table in [&CIE_1924_PHOTOPIC_LEF, &CIE_ILLUMINANT_D65, &CIE_ILLUMINANT_F2] {
            let mut sum = Sum::new();
            for index in 0..table.len() {
                sum += table
                    .at(table.start() + index * table.interval())
                    .unwrap();
            }
            assert_eq!(sum.value(), table.checksum());
        }

        let mut sum = ThreeSum::new();
        for value in CIE_1931_2DEG_OBSERVER.data() {
            sum += *value;
        }
        assert_eq!(sum.value(), CIE_1931_2DEG_OBSERVER.checksum());
    }

    #[test]
    fn test_shapes() {
        assert_eq!(CIE_1924_PHOTOPIC_LEF.start(), 360);
        assert_eq!(CIE_1924_PHOTOPIC_LEF.end(), 830);
        assert_eq!(CIE_ILLUMINANT_F2.end(), 780);
        assert_eq!(CIE_1931_2DEG_OBSERVER.start(), 380);
        assert_eq!(CIE_1931_2DEG_OBSERVER.end(), 780);

        assert_eq!(CIE_1924_PHOTOPIC_LEF.at(555), Some(1.0));
        assert_eq!(CIE_1924_PHOTOPIC_LEF.at(556), None);
        assert_eq!(CIE_1924_PHOTOPIC_LEF.at(835), None);
    }

    #[test]
    fn test_lookup() {
        assert_eq!(illuminant("F2").map(|t| t.label()), Some("F2"));
        assert_eq!(illuminant("d65").map(|t| t.label()), Some("D65"));
        assert_eq!(
            illuminant("CIE Illuminant D65").map(|t| t.label()),
            Some("D65")
        );
        assert!(illuminant("F7").is_none());

        assert_eq!(whitepoint("d65"), Some(WHITEPOINT_D65));
        assert!(whitepoint("D75").is_none());
    }

    #[test]
    fn test_whitepoints() {
        fn chromaticity(illuminant: &SpectralDistribution) -> [Float; 2] {
            let cmfs = CIE_1931_2DEG_OBSERVER.to_cmfs();
            let reflector = SpectralDistribution::ones(&cmfs.shape());
            let [x, y, z] = spectral_to_xyz(&reflector, &cmfs, Some(illuminant)).unwrap();
            let sum = x + y + z;
            [x / sum, y / sum]
        }

        let shape = SpectralShape::new(380.0, 780.0, 5.0).unwrap();
        for (illuminant, expected) in [
            (CIE_ILLUMINANT_D65.to_distribution(), WHITEPOINT_D65),
            (CIE_ILLUMINANT_F2.to_distribution(), WHITEPOINT_F2),
            (illuminant_a(&shape), WHITEPOINT_A),
        ] {
            let [x, y] = chromaticity(&illuminant);
            assert!((x - expected[0]).abs() < 5e-4, "{}", illuminant.label());
            assert!((y - expected[1]).abs() < 5e-4, "{}", illuminant.label());
        }
    }

    #[test]
    fn test_illuminant_a() {
        let a = illuminant_a(&SpectralShape::new(300.0, 830.0, 10.0).unwrap());
        assert!((a.get(560.0).unwrap() - 100.0).abs() < 1e-12);
        assert!(a.get(400.0).unwrap() < a.get(500.0).unwrap());
        assert!(a.get(700.0).unwrap() < a.get(830.0).unwrap());
    }

    #[test]
    fn test_blackbody() {
        // Wien's displacement law puts the peak of a 5000K radiator at 579.6nm.
        let spd = blackbody_spd(5000.0, &SpectralShape::new(300.0, 1000.0, 1.0).unwrap());
        assert_eq!(spd.label(), "5000K Blackbody");

        let (peak, _) = spd
            .iter()
            .fold((0.0, Float::NEG_INFINITY), |(peak, max), (wavelength, value)| {
                if max < value {
                    (wavelength, value)
                } else {
                    (peak, max)
                }
            });
        assert_eq!(peak, 580.0);
    }
}
