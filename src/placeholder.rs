//! The built-in placeholder corpus.

/// NurdRage-themed pseudo-Latin used as the replacement stream.
///
/// Tokens are extracted with the same rule as input text, so `scienca-lorem`
/// is a single token while `reactio—NurdRage` splits on the dash.
pub const NURDSEM_TEXT: &str = "
Experimento acidus meltdown, quantum servo hackus impetus.
Nulla pipettum solutionem, viva la exothermic reactionem.
Curium subscriptus in volumetric beaker maxima, sed in
errorum 404: reagent not found. Lorem scienca-lorem
magnus pyro clavius, dat dataset crucial,
ignite potentialum. Sed do circuitum transformare
voluptate testum, con alchemicus debugga.
Rageus Hackerorum unchained in manifestum,
codeus snippet voluntarius replicate.
Oscilloscope calibrat, magica chemica
magnus ex reactio—NurdRage repletum semper excitare.
";
