//! Canonical instances
//!
//! Immutable values whose slots are all absent are shared: the first request for
//! one of a given type creates it, and every later request returns that same
//! instance. Instances live for the rest of the process.

// Imports
use {
	parking_lot::RwLock,
	std::{
		any::{self, Any, TypeId},
		collections::HashMap,
		sync::{Arc, LazyLock},
	},
};

/// All canonical instances, by type
static INSTANCES: LazyLock<RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>> =
	LazyLock::new(|| RwLock::new(HashMap::new()));

/// Returns the canonical instance of `T`, creating it with `create` if it
/// doesn't exist yet.
pub fn get_or_create<T, F>(create: F) -> Arc<T>
where
	T: Any + Send + Sync,
	F: FnOnce() -> T,
{
	let ty = TypeId::of::<T>();

	// Check if we already have it
	if let Some(instance) = INSTANCES.read().get(&ty) {
		return self::downcast(Arc::clone(instance));
	}

	// Otherwise create it, unless someone beat us to it
	let mut created = false;
	let mut instances = INSTANCES.write();
	let instance = instances.entry(ty).or_insert_with(|| {
		created = true;
		Arc::new(create()) as Arc<dyn Any + Send + Sync>
	});
	let instance = Arc::clone(instance);
	drop(instances);

	// Note: Subscribers may create canonical instances themselves, so we can't log while locked
	if created {
		tracing::trace!(ty = any::type_name::<T>(), "Created canonical instance");
	}

	self::downcast(instance)
}

/// Downcasts an instance from the registry
fn downcast<T>(instance: Arc<dyn Any + Send + Sync>) -> Arc<T>
where
	T: Any + Send + Sync,
{
	instance
		.downcast::<T>()
		.expect("Canonical instances should be keyed by their type id")
}
