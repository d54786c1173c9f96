use colorimetry::cie::{CIE_1931_2DEG_OBSERVER, CIE_ILLUMINANT_F2, WHITEPOINT_F2};
use colorimetry::error::Result;
use colorimetry::models::xyz_to_colourspace_model;
use colorimetry::opt::{Grid, Options};
use colorimetry::{luminous_efficacy, luminous_efficiency, luminous_flux, Photometer, K_M};
use colorimetry::{spectral_to_xyz, SpectralDistribution};

fn main() -> Result<()> {
    // 1. Photometry of the normalised F2 lamp
    let mut f2 = CIE_ILLUMINANT_F2.to_distribution();
    f2.normalise(None)?;

    println!("{} on {}", f2.label(), f2.shape());
    println!("    luminous flux       {:>12.6} lm", luminous_flux(&f2, None, K_M)?);
    println!("    luminous efficiency {:>12.9}", luminous_efficiency(&f2, None)?);
    println!("    luminous efficacy   {:>12.6} lm/W", luminous_efficacy(&f2, None)?);

    let on_lef = Photometer::photopic(Options::builder().grid(Grid::EfficiencyFunction).build());
    println!(
        "    efficacy on V(λ)'s grid {:>8.6} lm/W",
        on_lef.luminous_efficacy(&f2)?
    );

    // 2. Whitepoint of F2
    let cmfs = CIE_1931_2DEG_OBSERVER.to_cmfs();
    let reflector = SpectralDistribution::ones(&cmfs.shape());
    let xyz = spectral_to_xyz(&reflector, &cmfs, Some(&f2))?;
    println!("\nXYZ {:>9.5} {:>9.5} {:>9.5}", xyz[0], xyz[1], xyz[2]);

    // 3. Colour models
    let scaled = xyz.map(|c| c / 100.0);
    for model in ["CIE xy", "CIE Lab", "CIE LCHab", "CIE Luv uv", "IPT"] {
        let coordinates = xyz_to_colourspace_model(&scaled, WHITEPOINT_F2, model)?;
        println!("{:<10} {:?}", model, coordinates.as_slice());
    }

    Ok(())
}
