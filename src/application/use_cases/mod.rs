mod create_port;
mod get_port;
mod update_port;

pub use crate::application::errors::PortUseCaseError;
pub use create_port::CreatePortUseCase;
pub use get_port::GetPortUseCase;
pub use update_port::UpdatePortUseCase;
