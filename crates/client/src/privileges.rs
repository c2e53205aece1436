//! Reference catalog of vSphere privilege identifiers.
//!
//! The table lists every privilege the vSphere authorization manager
//! recognizes, grouped by the functional area it governs. It is advisory:
//! role operations never reject a privilege because it is missing here,
//! the remote authority decides. Tooling uses it for validation hints,
//! completion and documentation.
//!
//! # Invariants
//! - Order is stable and groups are contiguous.
//! - Entries are unique.

/// Every known privilege identifier, in catalog order.
pub static PRIVILEGES: &[&str] = &[
    // Alarm
    "Alarm.Acknowledge",
    "Alarm.Create",
    "Alarm.Delete",
    "Alarm.DisableActions",
    "Alarm.Edit",
    "Alarm.SetStatus",

    // Authorization
    "Authorization.ModifyPermissions",
    "Authorization.ModifyPrivileges",
    "Authorization.ModifyRoles",
    "Authorization.ReassignRolePermissions",

    // AutoDeploy
    "AutoDeploy.Host.AssociateMachine",
    "AutoDeploy.Profile.Create",
    "AutoDeploy.Profile.Edit",
    "AutoDeploy.Rule.Create",
    "AutoDeploy.Rule.Delete",
    "AutoDeploy.Rule.Edit",
    "AutoDeploy.RuleSet.Activate",
    "AutoDeploy.RuleSet.Edit",

    // Certificate
    "Certificate.Manage",

    // ContentLibrary
    "ContentLibrary.AddLibraryItem",
    "ContentLibrary.CreateLocalLibrary",
    "ContentLibrary.CreateSubscribedLibrary",
    "ContentLibrary.DeleteLibraryItem",
    "ContentLibrary.DeleteLocalLibrary",
    "ContentLibrary.DeleteSubscribedLibrary",
    "ContentLibrary.DownloadSession",
    "ContentLibrary.EvictLibraryItem",
    "ContentLibrary.EvictSubscribedLibrary",
    "ContentLibrary.GetConfiguration",
    "ContentLibrary.ImportStorage",
    "ContentLibrary.ProbeSubscription",
    "ContentLibrary.ReadStorage",
    "ContentLibrary.SyncLibrary",
    "ContentLibrary.SyncLibraryItem",
    "ContentLibrary.TypeIntrospection",
    "ContentLibrary.UpdateConfiguration",
    "ContentLibrary.UpdateLibrary",
    "ContentLibrary.UpdateLibraryItem",
    "ContentLibrary.UpdateLocalLibrary",
    "ContentLibrary.UpdateSession",
    "ContentLibrary.UpdateSubscribedLibrary",

    // Cryptographer
    "Cryptographer.Access",
    "Cryptographer.AddDisk",
    "Cryptographer.Clone",
    "Cryptographer.Decrypt",
    "Cryptographer.Encrypt",
    "Cryptographer.EncryptNew",
    "Cryptographer.ManageEncryptionPolicy",
    "Cryptographer.ManageKeyServers",
    "Cryptographer.ManageKeys",
    "Cryptographer.Migrate",
    "Cryptographer.Recrypt",
    "Cryptographer.RegisterHost",
    "Cryptographer.RegisterVM",

    // DVPortgroup
    "DVPortgroup.Create",
    "DVPortgroup.Delete",
    "DVPortgroup.Modify",
    "DVPortgroup.PolicyOp",
    "DVPortgroup.ScopeOp",

    // DVSwitch
    "DVSwitch.Create",
    "DVSwitch.Delete",
    "DVSwitch.HostOp",
    "DVSwitch.Modify",
    "DVSwitch.Move",
    "DVSwitch.PolicyOp",
    "DVSwitch.PortConfig",
    "DVSwitch.PortSetting",
    "DVSwitch.ResourceManagement",
    "DVSwitch.Vspan",

    // Datacenter
    "Datacenter.Create",
    "Datacenter.Delete",
    "Datacenter.IpPoolConfig",
    "Datacenter.IpPoolQueryAllocations",
    "Datacenter.IpPoolReleaseIp",
    "Datacenter.Move",
    "Datacenter.Reconfigure",
    "Datacenter.Rename",

    // Datastore
    "Datastore.AllocateSpace",
    "Datastore.Browse",
    "Datastore.Config",
    "Datastore.Delete",
    "Datastore.DeleteFile",
    "Datastore.FileManagement",
    "Datastore.Move",
    "Datastore.Rename",
    "Datastore.UpdateVirtualMachineFiles",
    "Datastore.UpdateVirtualMachineMetadata",

    // EAM
    "EAM.Config",
    "EAM.Modify",
    "EAM.View",

    // Extension
    "Extension.Register",
    "Extension.Unregister",
    "Extension.Update",

    // ExternalStatsProvider
    "ExternalStatsProvider.Register",
    "ExternalStatsProvider.Unregister",
    "ExternalStatsProvider.Update",

    // Folder
    "Folder.Create",
    "Folder.Delete",
    "Folder.Move",
    "Folder.Rename",

    // Global
    "Global.CancelTask",
    "Global.CapacityPlanning",
    "Global.Diagnostics",
    "Global.DisableMethods",
    "Global.EnableMethods",
    "Global.GlobalTag",
    "Global.Health",
    "Global.Licenses",
    "Global.LogEvent",
    "Global.ManageCustomFields",
    "Global.Proxy",
    "Global.ScriptAction",
    "Global.ServiceManagers",
    "Global.SetCustomField",
    "Global.Settings",
    "Global.SystemTag",
    "Global.VCServer",

    // HealthUpdateProvider
    "HealthUpdateProvider.Register",
    "HealthUpdateProvider.Unregister",
    "HealthUpdateProvider.Update",

    // Host
    "Host.Cim.CimInteraction",
    "Host.Config.AdvancedConfig",
    "Host.Config.AuthenticationStore",
    "Host.Config.AutoStart",
    "Host.Config.Connection",
    "Host.Config.DateTime",
    "Host.Config.Firmware",
    "Host.Config.HyperThreading",
    "Host.Config.Image",
    "Host.Config.Maintenance",
    "Host.Config.Memory",
    "Host.Config.NetService",
    "Host.Config.Network",
    "Host.Config.Patch",
    "Host.Config.PciPassthru",
    "Host.Config.Power",
    "Host.Config.Quarantine",
    "Host.Config.Resources",
    "Host.Config.Settings",
    "Host.Config.Snmp",
    "Host.Config.Storage",
    "Host.Config.SystemManagement",
    "Host.Hbr.HbrManagement",
    "Host.Inventory.AddHostToCluster",
    "Host.Inventory.AddStandaloneHost",
    "Host.Inventory.CreateCluster",
    "Host.Inventory.DeleteCluster",
    "Host.Inventory.EditCluster",
    "Host.Inventory.MoveCluster",
    "Host.Inventory.MoveHost",
    "Host.Inventory.RemoveHostFromCluster",
    "Host.Inventory.RenameCluster",
    "Host.Local.CreateVM",
    "Host.Local.DeleteVM",
    "Host.Local.InstallAgent",
    "Host.Local.ManageUserGroups",
    "Host.Local.ReconfigVM",

    // InventoryService
    "InventoryService.Tagging.AttachTag",
    "InventoryService.Tagging.CreateCategory",
    "InventoryService.Tagging.CreateTag",
    "InventoryService.Tagging.DeleteCategory",
    "InventoryService.Tagging.DeleteTag",
    "InventoryService.Tagging.EditCategory",
    "InventoryService.Tagging.EditTag",
    "InventoryService.Tagging.ModifyUsedByForCategory",
    "InventoryService.Tagging.ModifyUsedByForTag",

    // Network
    "Network.Assign",
    "Network.Config",
    "Network.Delete",
    "Network.Move",

    // Performance
    "Performance.ModifyIntervals",

    // Profile
    "Profile.Clear",
    "Profile.Create",
    "Profile.Delete",
    "Profile.Edit",
    "Profile.Export",
    "Profile.View",

    // Resource
    "Resource.ApplyRecommendation",
    "Resource.AssignVAppToPool",
    "Resource.AssignVMToPool",
    "Resource.ColdMigrate",
    "Resource.CreatePool",
    "Resource.DeletePool",
    "Resource.EditPool",
    "Resource.HotMigrate",
    "Resource.MovePool",
    "Resource.QueryVMotion",
    "Resource.RenamePool",

    // ScheduledTask
    "ScheduledTask.Create",
    "ScheduledTask.Delete",
    "ScheduledTask.Edit",
    "ScheduledTask.Run",

    // Sessions
    "Sessions.GlobalMessage",
    "Sessions.ImpersonateUser",
    "Sessions.TerminateSession",
    "Sessions.ValidateSession",

    // StoragePod
    "StoragePod.Config",

    // StorageProfile
    "StorageProfile.Update",
    "StorageProfile.View",

    // StorageViews
    "StorageViews.ConfigureService",
    "StorageViews.View",

    // System
    "System.Anonymous",
    "System.Read",
    "System.View",

    // Task
    "Task.Create",
    "Task.Update",

    // TransferService
    "TransferService.Manage",
    "TransferService.Monitor",

    // VApp
    "VApp.ApplicationConfig",
    "VApp.AssignResourcePool",
    "VApp.AssignVApp",
    "VApp.AssignVM",
    "VApp.Clone",
    "VApp.Create",
    "VApp.Delete",
    "VApp.Export",
    "VApp.ExtractOvfEnvironment",
    "VApp.Import",
    "VApp.InstanceConfig",
    "VApp.ManagedByConfig",
    "VApp.Move",
    "VApp.PowerOff",
    "VApp.PowerOn",
    "VApp.Rename",
    "VApp.ResourceConfig",
    "VApp.Suspend",
    "VApp.Unregister",

    // VRMPolicy
    "VRMPolicy.Query",
    "VRMPolicy.Update",

    // VcIntegrity
    "VcIntegrity.Baseline.com.vmware.vcIntegrity.AssignBaselines",
    "VcIntegrity.Baseline.com.vmware.vcIntegrity.ManageBaselines",
    "VcIntegrity.FileUpload.com.vmware.vcIntegrity.ImportFile",
    "VcIntegrity.General.com.vmware.vcIntegrity.Configure",
    "VcIntegrity.Updates.com.vmware.vcIntegrity.Remediate",
    "VcIntegrity.Updates.com.vmware.vcIntegrity.Scan",
    "VcIntegrity.Updates.com.vmware.vcIntegrity.Stage",
    "VcIntegrity.Updates.com.vmware.vcIntegrity.ViewStatus",

    // VirtualMachine
    "VirtualMachine.Config.AddExistingDisk",
    "VirtualMachine.Config.AddNewDisk",
    "VirtualMachine.Config.AddRemoveDevice",
    "VirtualMachine.Config.AdvancedConfig",
    "VirtualMachine.Config.Annotation",
    "VirtualMachine.Config.CPUCount",
    "VirtualMachine.Config.ChangeTracking",
    "VirtualMachine.Config.DiskExtend",
    "VirtualMachine.Config.DiskLease",
    "VirtualMachine.Config.EditDevice",
    "VirtualMachine.Config.HostUSBDevice",
    "VirtualMachine.Config.ManagedBy",
    "VirtualMachine.Config.Memory",
    "VirtualMachine.Config.MksControl",
    "VirtualMachine.Config.QueryFTCompatibility",
    "VirtualMachine.Config.QueryUnownedFiles",
    "VirtualMachine.Config.RawDevice",
    "VirtualMachine.Config.ReloadFromPath",
    "VirtualMachine.Config.RemoveDisk",
    "VirtualMachine.Config.Rename",
    "VirtualMachine.Config.ResetGuestInfo",
    "VirtualMachine.Config.Resource",
    "VirtualMachine.Config.Settings",
    "VirtualMachine.Config.SwapPlacement",
    "VirtualMachine.Config.ToggleForkParent",
    "VirtualMachine.Config.Unlock",
    "VirtualMachine.Config.UpgradeVirtualHardware",
    "VirtualMachine.GuestOperations.Execute",
    "VirtualMachine.GuestOperations.Modify",
    "VirtualMachine.GuestOperations.ModifyAliases",
    "VirtualMachine.GuestOperations.Query",
    "VirtualMachine.GuestOperations.QueryAliases",
    "VirtualMachine.Hbr.ConfigureReplication",
    "VirtualMachine.Hbr.MonitorReplication",
    "VirtualMachine.Hbr.ReplicaManagement",
    "VirtualMachine.Interact.AnswerQuestion",
    "VirtualMachine.Interact.Backup",
    "VirtualMachine.Interact.ConsoleInteract",
    "VirtualMachine.Interact.CreateScreenshot",
    "VirtualMachine.Interact.CreateSecondary",
    "VirtualMachine.Interact.DefragmentAllDisks",
    "VirtualMachine.Interact.DeviceConnection",
    "VirtualMachine.Interact.DisableSecondary",
    "VirtualMachine.Interact.DnD",
    "VirtualMachine.Interact.EnableSecondary",
    "VirtualMachine.Interact.GuestControl",
    "VirtualMachine.Interact.MakePrimary",
    "VirtualMachine.Interact.Pause",
    "VirtualMachine.Interact.PowerOff",
    "VirtualMachine.Interact.PowerOn",
    "VirtualMachine.Interact.PutUsbScanCodes",
    "VirtualMachine.Interact.Record",
    "VirtualMachine.Interact.Replay",
    "VirtualMachine.Interact.Reset",
    "VirtualMachine.Interact.SESparseMaintenance",
    "VirtualMachine.Interact.SetCDMedia",
    "VirtualMachine.Interact.SetFloppyMedia",
    "VirtualMachine.Interact.Suspend",
    "VirtualMachine.Interact.TerminateFaultTolerantVM",
    "VirtualMachine.Interact.ToolsInstall",
    "VirtualMachine.Interact.TurnOffFaultTolerance",
    "VirtualMachine.Inventory.Create",
    "VirtualMachine.Inventory.CreateFromExisting",
    "VirtualMachine.Inventory.Delete",
    "VirtualMachine.Inventory.Move",
    "VirtualMachine.Inventory.Register",
    "VirtualMachine.Inventory.Unregister",
    "VirtualMachine.Namespace.Event",
    "VirtualMachine.Namespace.EventNotify",
    "VirtualMachine.Namespace.Management",
    "VirtualMachine.Namespace.ModifyContent",
    "VirtualMachine.Namespace.Query",
    "VirtualMachine.Namespace.ReadContent",
    "VirtualMachine.Provisioning.Clone",
    "VirtualMachine.Provisioning.CloneTemplate",
    "VirtualMachine.Provisioning.CreateTemplateFromVM",
    "VirtualMachine.Provisioning.Customize",
    "VirtualMachine.Provisioning.DeployTemplate",
    "VirtualMachine.Provisioning.DiskRandomAccess",
    "VirtualMachine.Provisioning.DiskRandomRead",
    "VirtualMachine.Provisioning.FileRandomAccess",
    "VirtualMachine.Provisioning.GetVmFiles",
    "VirtualMachine.Provisioning.MarkAsTemplate",
    "VirtualMachine.Provisioning.MarkAsVM",
    "VirtualMachine.Provisioning.ModifyCustSpecs",
    "VirtualMachine.Provisioning.PromoteDisks",
    "VirtualMachine.Provisioning.PutVmFiles",
    "VirtualMachine.Provisioning.ReadCustSpecs",
    "VirtualMachine.State.CreateSnapshot",
    "VirtualMachine.State.RemoveSnapshot",
    "VirtualMachine.State.RenameSnapshot",
    "VirtualMachine.State.RevertToSnapshot",

    // vService
    "vService.CreateDependency",
    "vService.DestroyDependency",
    "vService.ReconfigureDependency",
    "vService.UpdateDependency",
];

/// All privilege identifiers in catalog order.
pub fn all() -> &'static [&'static str] {
    PRIVILEGES
}

/// Whether `privilege` appears in the catalog (exact, case-sensitive).
pub fn is_known(privilege: &str) -> bool {
    PRIVILEGES.contains(&privilege)
}

/// The functional area of a privilege: the text before the first `.`.
pub fn group_of(privilege: &str) -> &str {
    privilege
        .split_once('.')
        .map_or(privilege, |(group, _)| group)
}

/// Distinct functional areas, in catalog order.
pub fn groups() -> Vec<&'static str> {
    let mut groups: Vec<&'static str> = Vec::new();
    for privilege in PRIVILEGES.iter().copied() {
        let group = group_of(privilege);
        if groups.last() != Some(&group) {
            groups.push(group);
        }
    }
    groups
}

/// Privileges under the functional area `group`, in catalog order.
///
/// `group` may be nested (`VirtualMachine.Config`); it only matches whole
/// dot-separated segments, so `Virtual` selects nothing.
pub fn in_group(group: &str) -> impl Iterator<Item = &'static str> + '_ {
    PRIVILEGES.iter().copied().filter(move |privilege| {
        privilege
            .strip_prefix(group)
            .is_some_and(|rest| rest.starts_with('.'))
    })
}

/// Entries of `privileges` that are not in the catalog, in input order.
pub fn unknown<S: AsRef<str>>(privileges: &[S]) -> Vec<&str> {
    privileges
        .iter()
        .map(AsRef::as_ref)
        .filter(|privilege| !is_known(privilege))
        .collect()
}
