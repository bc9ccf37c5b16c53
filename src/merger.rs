use log::debug;

use crate::prelude::*;

/// Merge touching bodies in one left-to-right sweep and return how many were absorbed.
///
/// Each body in turn absorbs every later body it overlaps. An absorbed body is
/// swap-removed, so the body moved into its slot is checked next. The survivor
/// grows as it absorbs and may reach further bodies later in the same sweep,
/// but bodies already passed over are not looked at again, so a single sweep
/// can leave overlapping pairs behind.
pub fn coalesce(universe: &mut Universe) -> usize {
	let bodies = universe.bodies_mut();
	let mut absorbed = 0;

	let mut i = 0;
	while i + 1 < bodies.len() {
		let mut j = i + 1;
		while j < bodies.len() {
			if !bodies[i].overlaps(&bodies[j]) {
				j += 1;
				continue;
			}

			let other = bodies.swap_remove(j);
			bodies[i].absorb(&other);
			absorbed += 1;
		}
		i += 1;
	}

	if absorbed > 0 {
		debug!("coalesced {} bodies, {} remain", absorbed, bodies.len());
	}
	absorbed
}

/// Sweep until nothing overlaps any more.
pub fn coalesce_all(universe: &mut Universe) -> usize {
	let mut total = 0;
	loop {
		let absorbed = coalesce(universe);
		if absorbed == 0 {
			return total;
		}
		total += absorbed;
	}
}
