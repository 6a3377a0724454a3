// Copyright (C) 2020 Kevin Del Castillo Ramírez
//
// This file is part of recommendation-system.
//
// recommendation-system is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// recommendation-system is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with recommendation-system.  If not, see <http://www.gnu.org/licenses/>.

use controller::Controller;

/// Sum of absolute rating differences over the items both users rated,
/// walking `user_b`'s rated items in order. Lower is more similar.
///
/// Returns `None` when the users have nothing in common. The score isn't
/// normalized, so more shared items usually means a bigger score.
pub fn similarity_score<C>(controller: &C, user_a: &C::User, user_b: &C::User) -> Option<u32>
where
    C: Controller,
{
    let mut score = None;
    for item in controller.user_items(user_b) {
        let a = controller.rating(user_a, item);
        let b = controller.rating(user_b, item);

        if let (Some(a), Some(b)) = (a, b) {
            *score.get_or_insert(0) += a.abs_diff(b);
        }
    }

    score
}
