/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Depth-first traversal of member trees.

use crate::schema::Member;

/// Callbacks for [`walk_members`].
///
/// Every method defaults to doing nothing, so visitors only implement the
/// variants they care about.
pub trait MemberVisitor {
    /// Error returned by the callbacks. Use [`std::convert::Infallible`]
    /// for visitors that cannot fail.
    type Error;

    /// Called for a field member.
    fn visit_field(&mut self, _name: &str, _required: bool) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called for a component reference.
    fn visit_component(&mut self, _name: &str, _required: bool) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called before the members of a group are walked.
    fn enter_group(&mut self, _group: &Member) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called after the members of a group were walked.
    fn leave_group(&mut self, _group: &Member) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Walks `members` in order, descending into groups.
///
/// # Errors
/// Stops at and returns the first error raised by the visitor.
pub fn walk_members<V: MemberVisitor + ?Sized>(
    members: &[Member],
    visitor: &mut V,
) -> Result<(), V::Error> {
    for member in members {
        match member {
            Member::Field { name, required } => visitor.visit_field(name, *required)?,
            Member::Component { name, required } => visitor.visit_component(name, *required)?,
            Member::Group { members: body, .. } => {
                visitor.enter_group(member)?;
                walk_members(body, visitor)?;
                visitor.leave_group(member)?;
            }
        }
    }
    Ok(())
}
